// Job search: outbound provider calls and canonical listing normalization.
// Providers disagree on shape; everything past this module sees JobListing.

pub mod client;
pub mod handlers;
pub mod listings;
