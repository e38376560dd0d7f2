use alloy::sol;

sol! {
    // Creation bytecode pinned from the solc 0.8.15 build.
    #[sol(rpc, all_derives, bytecode = "608060405234801561001057600080fd5b5033600055602080380360003960005173ffffffffffffffffffffffffffffffffffffffff16600155610189806100486000396000f3fe60806040523461004f576004361061004f5760003560e01c80636aae5cda14610054578063f4473e22146100b0578063ec07fb741461010c5780638da5cb5b1461013c5780634f5cbe6a14610148575b600080fd5b60005433141561004f5760043573ffffffffffffffffffffffffffffffffffffffff168060005260026020526040600020600190557fb647d97ae18f21bd9f6d98358b325ad40af7449e1d52d67302f952664312b2e1600080a2005b60005433141561004f5760043573ffffffffffffffffffffffffffffffffffffffff168060005260026020526040600020600090557f833b8e31a03428079aaec61dd0af9cbd0e46a7cf4a001c20c125c2501704b4bb600080a2005b60043573ffffffffffffffffffffffffffffffffffffffff16600052600260205260406000205460005260206000f35b60005460005260206000f35b60015460005260206000f3a2646970667358221220b2bea17a0868d0384c82a00d45966eeeab5424aa22e5310795f879de296abab164736f6c634300080f0033")]
    contract BuyItNow {
        event CollectionApproved(address indexed collection);
        event CollectionUnapproved(address indexed collection);

        constructor(address ROYAddress);

        function approveCollection(address collection) external;
        function unapproveCollection(address collection) external;
        function approvedCollections(address collection) external view returns (bool);
        function owner() external view returns (address);
        function ROYAddress() external view returns (address);
    }
}
