pub mod header;
pub mod upload_area;
pub mod job_posting_input;
pub mod analyze_button;
pub mod progress_bar;
pub mod status_message;
pub mod result_view;
