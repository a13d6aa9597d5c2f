mod common;

mod recommend;
