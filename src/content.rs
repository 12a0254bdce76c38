// =============================================================================
// EduSphere Web - Static Content Tables
// =============================================================================
// Compile-time marketing content driving the presentation components.
// Never mutated after load.
// =============================================================================

// -----------------------------------------------------------------------------
// Record Types
// -----------------------------------------------------------------------------

/// One entry in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// One navigable route, used by the navbar and footer quick links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// One entry in the "how it works" steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

// -----------------------------------------------------------------------------
// Tables
// -----------------------------------------------------------------------------

pub const FEATURES: [Feature; 4] = [
    Feature {
        id: 1,
        icon: "📚",
        title: "Diverse Courses",
        subtitle: "Learn from a wide range of topics.",
    },
    Feature {
        id: 2,
        icon: "🎥",
        title: "Interactive Lessons",
        subtitle: "Videos, notes & discussions.",
    },
    Feature {
        id: 3,
        icon: "📝",
        title: "Quizzes & Assignments",
        subtitle: "Practice and test yourself.",
    },
    Feature {
        id: 4,
        icon: "🏅",
        title: "Certificates",
        subtitle: "Earn industry-recognized proof of learning.",
    },
];

pub const ROUTES: [RouteEntry; 4] = [
    RouteEntry { label: "Home", href: "/" },
    RouteEntry { label: "Courses", href: "/courses" },
    RouteEntry { label: "About", href: "/about" },
    RouteEntry { label: "Contact", href: "/contact" },
];

pub const HOW_IT_WORKS: [Step; 3] = [
    Step {
        id: 1,
        icon: "👤",
        title: "Create Your Account",
        description: "Sign up for free and set your learning goals.",
    },
    Step {
        id: 2,
        icon: "🎓",
        title: "Pick a Course",
        description: "Browse the catalog and learn at your own pace.",
    },
    Step {
        id: 3,
        icon: "🏅",
        title: "Earn Your Certificate",
        description: "Complete quizzes and assignments to get certified.",
    },
];

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let feature_ids: HashSet<u32> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(feature_ids.len(), FEATURES.len());

        let step_ids: HashSet<u32> = HOW_IT_WORKS.iter().map(|s| s.id).collect();
        assert_eq!(step_ids.len(), HOW_IT_WORKS.len());
    }

    #[test]
    fn test_routes_are_absolute() {
        for route in ROUTES {
            assert!(route.href.starts_with('/'), "{} is not absolute", route.label);
        }
    }
}
