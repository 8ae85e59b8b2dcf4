mod bean_one;
mod composite_key;
mod guard;
mod options;
