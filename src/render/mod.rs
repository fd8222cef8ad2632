pub(crate) mod background;
pub(crate) mod composite;
pub(crate) mod fit;
pub(crate) mod gradient;
pub(crate) mod ornament;
pub(crate) mod pipeline;
pub(crate) mod report;
pub(crate) mod settings;
pub(crate) mod sketch;
