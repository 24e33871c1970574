pub mod check;
pub mod init;
pub mod render;
pub mod section;
pub mod serve;
pub mod start;
pub mod toc;
