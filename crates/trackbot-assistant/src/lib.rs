pub mod analytics;
pub mod assistant;
pub mod formatter;
pub mod intent;
pub mod quick_action;
pub mod reply;
pub mod route_map;
pub mod timeline;
pub mod weather;

#[cfg(test)]
mod tests;

pub use assistant::Assistant;
pub use quick_action::QuickAction;
pub use reply::Reply;
