// src/lib.rs
// =============================================================================
// Library root for showcase-tools.
//
// The crate has two independent halves:
// - sitemap: builds sitemap.xml for the showcase site from its category
//   config and tool identifiers
// - counter: maps a number onto rolling digit strips (the counter component)
//   and animates each strip with a spring
//
// The binary in src/main.rs is a thin CLI over these modules.
// =============================================================================

pub mod counter;
pub mod sitemap;
