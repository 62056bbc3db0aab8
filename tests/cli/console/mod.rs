mod dispatches_cpd_lines_contract;
