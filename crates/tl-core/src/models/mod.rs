pub mod identity;
pub mod participant;
pub mod role;
pub mod task;
pub mod task_list;
pub mod user_profile;
