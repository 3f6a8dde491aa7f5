mod maze;
mod point;
