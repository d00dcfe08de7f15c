pub mod analysis;
pub mod analyzing;
pub mod capture;
pub mod consent;
pub mod header;
pub mod home;
pub mod recommendations;
pub mod results;
pub mod risk;
pub mod scan;
pub mod scan_intro;
pub mod shoe_detail;
