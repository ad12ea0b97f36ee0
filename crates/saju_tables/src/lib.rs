//! Fixed enumerations and rule tables for Four Pillars charts.
//!
//! This crate provides:
//! - The ten Stems, twelve Branches, five Elements and yin/yang polarity
//! - The sexagenary `CycleIndex` (0..60) with stem/branch round-trips
//! - Hidden-stem fractions per branch
//! - Ten Relations between the Day Stem and any other stem
//! - Combination, clash, punishment, harm and break tables
//! - Prosperity/blade seats and symbolic-star lookups
//!
//! All tables are compile-time constants; lookups that can miss return
//! `Option` rather than a default.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod hidden_stems;
pub mod rules;
pub mod stars;
pub mod stem;
pub mod ten_relation;

pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::{CYCLE_LEN, CycleIndex};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::TableError;
pub use hidden_stems::{
    HIDDEN_STEM_WEIGHT_SUMS, HiddenStem, dominant_hidden_stem, hidden_stems, hidden_weight_sum,
    is_hidden_in,
};
pub use rules::{
    ThreeHarmony, branch_six_combination, half_combination, is_branch_break, is_branch_clash,
    is_branch_harm, is_pair_punishment, is_stem_clash, is_triple_punishment, stem_combination,
    three_harmony,
};
pub use stars::{
    academic_branch, blade_branch, group_star_branches, nobleman_branches, prosperity_branch,
};
pub use stem::{ALL_STEMS, Stem};
pub use ten_relation::{
    ALL_TEN_RELATIONS, DRAINING_RELATIONS, SUPPORTING_RELATIONS, TenRelation, ten_relation,
};
