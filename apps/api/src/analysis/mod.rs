// Analysis API: runs the extraction → scoring → feedback pipeline for one résumé per request.
// Stateless across requests; the rubric is loaded once at startup and shared read-only.

pub mod handlers;
pub mod pipeline;
