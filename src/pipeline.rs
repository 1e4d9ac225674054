//! Request pipelines and the service boundary around them.

pub mod orchestrator;
pub mod service;
pub mod simple;

pub use orchestrator::{AnswerSource, ChatPipeline, PipelineReply};
pub use service::{
    ChatReply, ChatRequest, ChatService, Engine, ReplyStatus, ServiceStats, TRAIN_SUCCESS_MESSAGE,
    TrainReply,
};
pub use simple::SimplePipeline;
