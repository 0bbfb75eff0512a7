pub mod ai_agent;
pub mod user;
pub mod user_with_agents;
pub mod webinar;
