mod property_test;
mod workflow_test;
