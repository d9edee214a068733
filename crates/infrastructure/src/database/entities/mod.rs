pub mod paquetes;
