// Adapters layer: concrete storage backends behind the domain `Storage` port.

pub mod storage;
