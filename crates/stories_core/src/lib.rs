//! Stories core: pure state machine and view-model helpers.
mod aggregate;
mod effect;
mod msg;
mod state;
mod story;
mod update;
mod view_model;

pub use aggregate::CommentTally;
pub use effect::Effect;
pub use msg::Msg;
pub use state::AppState;
pub use story::{Story, StoryId};
pub use update::update;
pub use view_model::AppViewModel;
