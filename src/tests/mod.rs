pub mod util;

mod contains;
