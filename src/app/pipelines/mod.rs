pub mod housing_pipeline;
