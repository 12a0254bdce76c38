// =============================================================================
// EduSphere Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Common Components
// 2. Content Cards
// 3. Form Components
// =============================================================================

pub mod cards;
pub mod common;
pub mod footer;
pub mod forms;
pub mod nav;

pub use cards::{FeatureCard, StepCard};
pub use common::{Button, ButtonVariant, Card, SectionTitle};
pub use footer::Footer;
pub use forms::TextInput;
pub use nav::{NavLink, Navbar};
