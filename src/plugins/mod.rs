pub mod stick_plugin;
