mod account;
mod comment;
mod product;
mod session;
mod store;
