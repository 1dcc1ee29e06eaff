mod hosting;
mod lifecycle;
mod rendering;
mod session;
