//! Ensamblado del descriptor de tarea.

pub mod assembler;
pub mod descriptor;

pub use assembler::{generate_task, AssemblerSettings, TaskAssembler};
pub use descriptor::{StrategyRef, TaskDescriptor};
