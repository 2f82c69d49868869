mod memory;
mod storable;
