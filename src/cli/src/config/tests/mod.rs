/* src/cli/src/config/tests/mod.rs */

mod loader;
