pub mod audit_record;
pub mod finding;
pub mod mode;
pub mod pillar_outcome;
pub mod validation_result;
