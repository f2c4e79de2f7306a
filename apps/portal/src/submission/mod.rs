// Application form: résumé selection, submission lifecycle and result rendering.
// All backend traffic goes through the ApiGateway — no direct HTTP calls here.

pub mod controller;
pub mod resume;
pub mod view;
