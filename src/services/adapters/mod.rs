pub mod databricks_command;
