pub mod ai_agent_repository;
pub mod user_repository;
pub mod webinar_repository;
