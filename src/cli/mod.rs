pub mod orchestration;

pub use orchestration::{
    run_history, run_publish, select_history_tags, PublishOptions, PublishOutcome,
};
