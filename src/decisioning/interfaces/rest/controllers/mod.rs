pub mod decisioning_rest_controller;
