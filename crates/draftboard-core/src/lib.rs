// Backend client, data model, and refresh workflow for the draft dashboard.

pub mod api;
pub mod player;
pub mod protocol;
pub mod workflow;
