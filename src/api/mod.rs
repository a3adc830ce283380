pub mod registry_config_dto;
