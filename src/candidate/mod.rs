//! Candidate collection for ranked match results.

pub(crate) mod topk;
