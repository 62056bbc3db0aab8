mod installs_default_config_contract;
