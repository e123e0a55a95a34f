mod application;
mod review;
mod scholarship;
mod user;
