mod appointment;
mod hospital;
mod user;
