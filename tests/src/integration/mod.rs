//! # Integration Flows
//!
//! Several `SwarmNode`s in one process, wired together by handing
//! announce payloads and VRF claims across directly.

pub mod announce_flow;
pub mod selection_flow;
