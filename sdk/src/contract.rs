use alloy::sol;

sol! {
    #[sol(rpc)]
    contract AaaStaking {
        // ========= Errors =========
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);

        // ========= User flows =========
        function deposit(uint256 amount) public;
        function redeem(uint256 amount) public;
        function transferStake(address to, uint256 amount) public;

        // ========= Views =========
        function balanceOf(address account) view returns (uint256);
        function timeUntilUnlock(address user) view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    contract ERC20 {
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidApprover(address approver);
        error ERC20InvalidSpender(address spender);

        event Approval(address indexed owner, address indexed spender, uint256 amount);

        function approve(address spender, uint256 amount) public returns (bool);
    }
}
