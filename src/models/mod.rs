//! PagerDuty API model types.

mod escalation_policy;
mod integration;
mod object_ref;
mod orchestration;
mod priority;
mod response_play;
mod service;
mod team;
mod user;
mod vendor;

pub use escalation_policy::*;
pub use integration::*;
pub use object_ref::*;
pub use orchestration::*;
pub use priority::*;
pub use response_play::*;
pub use service::*;
pub use team::*;
pub use user::*;
pub use vendor::*;
