mod customers;
mod errors;
mod transactions;
mod transfers;
