pub use crate::base::{
    config::Config,
    error::BotError,
    types::{BotResult, Dispatch, Err, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
