pub mod add;
pub mod edit;
pub mod events;
pub mod export;
pub mod filter;
pub mod init;
pub mod new;
pub mod rm;
pub mod root;
pub mod select;
pub mod sort;
pub mod sum;
pub mod view;
