// Wire formats shared with external tools.

pub mod dto;
