mod command_runner_flow;
