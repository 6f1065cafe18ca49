pub mod cli;
pub mod ctx;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod reference;
pub mod report;
pub mod schema;
pub mod scores;
