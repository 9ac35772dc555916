pub mod audit;
pub mod backends;
pub mod clients;
pub mod dispatcher;
pub mod pillars;
pub mod report;
pub mod targeted_remediation;
pub mod validator;
