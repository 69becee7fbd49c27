/// runnable walkthroughs of the PLOG rate law, selected by task number
pub mod plog_examples;
