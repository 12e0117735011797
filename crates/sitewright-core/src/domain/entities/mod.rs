pub mod brief;
pub mod common;
pub mod content;
pub mod markup;
pub mod navigation;
pub mod site_plan;
pub mod style;

pub use crate::domain::DomainError;
pub use brief::SiteBrief;
pub use content::{ContentBundle, ContentLibrary, IndustryProfile};
pub use navigation::NavigationModel;
pub use site_plan::SitePlan;
