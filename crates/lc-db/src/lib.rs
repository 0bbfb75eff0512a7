pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::connect;
pub use error::{DbError, Result};
pub use repositories::ai_agent_repository::AiAgentRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::webinar_repository::WebinarRepository;
