pub mod assess;
pub mod compare;
pub mod emi;
pub mod history;
