pub mod events;
pub mod guests;
pub mod invites;
pub mod planners;
pub mod vendors;
