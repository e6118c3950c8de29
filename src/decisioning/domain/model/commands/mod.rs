pub mod ingest_event_command;
