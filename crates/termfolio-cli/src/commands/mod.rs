pub mod check;
pub mod export;
pub mod init;
pub mod run;
pub mod themes;
